//! ClassDesk - 班级管理面板后端服务
//!
//! 基于 Actix Web 构建，管理班级、学生、作业与通知。
//!
//! # 架构
//! - `config`: 配置管理
//! - `domain`: 收件人解析、通知编辑器与列表查询
//! - `errors`: 统一错误处理
//! - `models`: 数据模型定义
//! - `routes`: API 路由层
//! - `runtime`: 运行时生命周期管理
//! - `services`: 请求处理层
//! - `storage`: 数据存储层（内存实现，带模拟延迟）
//! - `utils`: 工具函数

pub mod config;
pub mod domain;
pub mod errors;
pub mod models;
pub mod routes;
pub mod runtime;
pub mod services;
pub mod storage;
pub mod utils;
