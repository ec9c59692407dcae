use thiserror::Error;

#[derive(Error, Debug)]
pub enum StaffQrError {
    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Image error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("QR encoding error: {0}")]
    QrEncodeError(#[from] qrcode::types::QrError),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Rendering,
    Output,
    Configuration,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl StaffQrError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StaffQrError::CsvError(_) => ErrorCategory::Input,
            StaffQrError::ImageError(_) | StaffQrError::QrEncodeError(_) => {
                ErrorCategory::Rendering
            }
            StaffQrError::IoError(_) => ErrorCategory::Output,
            StaffQrError::ConfigValidationError { .. }
            | StaffQrError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            StaffQrError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Output => ErrorSeverity::Critical,
            ErrorCategory::Rendering => ErrorSeverity::Medium,
            _ => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            StaffQrError::CsvError(_) => {
                "檢查輸入檔是否為含標題列的 CSV（請從試算表匯出 CSV）"
            }
            StaffQrError::IoError(_) => "確認輸入檔存在且輸出目錄可寫入",
            StaffQrError::ImageError(_) => "確認 logo 檔為有效的 PNG/JPEG 圖片",
            StaffQrError::QrEncodeError(_) => {
                "資料超出 QR 容量：啟用 render.fit 或縮短欄位內容"
            }
            StaffQrError::ConfigValidationError { .. }
            | StaffQrError::InvalidConfigValueError { .. } => "修正設定檔或命令列參數後重試",
            StaffQrError::ProcessingError { .. } => "使用 --verbose 重新執行以取得更多資訊",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("無法讀取聯絡人資料: {}", self),
            ErrorCategory::Rendering => format!("QR code 產生失敗: {}", self),
            ErrorCategory::Output => format!("無法寫入輸出: {}", self),
            ErrorCategory::Configuration => format!("設定錯誤: {}", self),
            ErrorCategory::Processing => format!("處理失敗: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, StaffQrError>;
