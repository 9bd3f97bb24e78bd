// 业务错误码，随 ApiResponse 以整数形式返回
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    ValidationFailed = 1001,
    NotFound = 1004,
    Conflict = 1009,
    InternalServerError = 1500,

    // 班级
    ClassNotFound = 2000,
    ClassCreationFailed = 2001,
    ClassUpdateFailed = 2002,
    ClassDeleteFailed = 2003,

    // 学生
    StudentNotFound = 3000,
    StudentCreationFailed = 3001,
    StudentUpdateFailed = 3002,
    StudentDeleteFailed = 3003,
    StudentEmailInvalid = 3004,

    // 作业
    AssignmentNotFound = 4000,
    AssignmentCreationFailed = 4001,
    AssignmentUpdateFailed = 4002,
    AssignmentDeleteFailed = 4003,

    // 通知
    NotificationNotFound = 5000,
    NotificationSendFailed = 5001,
    NotificationUpdateFailed = 5002,
    NotificationDeleteFailed = 5003,

    // 通知编辑会话
    ComposerNotFound = 6000,
    ComposerBusy = 6001,
    ComposerValidationFailed = 6002,
}
