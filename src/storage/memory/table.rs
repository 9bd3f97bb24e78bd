//! 按插入顺序保存记录的内存表

use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::errors::{ClassDeskError, Result};
use crate::utils::id::IdGenerator;

/// 可按主键查找的行
pub(crate) trait Keyed {
    fn key(&self) -> &str;
}

pub(crate) struct Table<R> {
    name: &'static str,
    rows: RwLock<Vec<R>>,
}

impl<R: Keyed + Clone> Table<R> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            rows: RwLock::new(Vec::new()),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<R>>> {
        self.rows
            .read()
            .map_err(|_| ClassDeskError::storage_state(format!("{} table lock poisoned", self.name)))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<R>>> {
        self.rows
            .write()
            .map_err(|_| ClassDeskError::storage_state(format!("{} table lock poisoned", self.name)))
    }

    fn not_found(&self, id: &str) -> ClassDeskError {
        ClassDeskError::entity_not_found(self.name, id)
    }

    pub fn all(&self) -> Result<Vec<R>> {
        Ok(self.read()?.clone())
    }

    pub fn find(&self, id: &str) -> Result<R> {
        self.read()?
            .iter()
            .find(|row| row.key() == id)
            .cloned()
            .ok_or_else(|| self.not_found(id))
    }

    #[cfg(test)]
    pub fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.read()?.iter().any(|row| row.key() == id))
    }

    #[cfg(test)]
    pub fn len(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    /// 生成一个表中尚未出现的 id，构造记录并追加到末尾
    pub fn insert_new(&self, ids: &IdGenerator, build: impl FnOnce(String) -> R) -> Result<R> {
        let mut rows = self.write()?;
        let mut id = ids.next_id();
        while rows.iter().any(|row| row.key() == id) {
            id = ids.next_id();
        }
        let row = build(id);
        rows.push(row.clone());
        Ok(row)
    }

    /// 直接插入带 id 的记录（样例数据），id 重复时覆盖旧记录
    pub fn upsert(&self, row: R) -> Result<()> {
        let mut rows = self.write()?;
        match rows.iter_mut().find(|existing| existing.key() == row.key()) {
            Some(existing) => *existing = row,
            None => rows.push(row),
        }
        Ok(())
    }

    pub fn modify(&self, id: &str, apply: impl FnOnce(&mut R)) -> Result<R> {
        let mut rows = self.write()?;
        let row = rows
            .iter_mut()
            .find(|row| row.key() == id)
            .ok_or_else(|| self.not_found(id))?;
        apply(row);
        Ok(row.clone())
    }

    pub fn remove(&self, id: &str) -> Result<R> {
        let mut rows = self.write()?;
        let index = rows
            .iter()
            .position(|row| row.key() == id)
            .ok_or_else(|| self.not_found(id))?;
        Ok(rows.remove(index))
    }
}
