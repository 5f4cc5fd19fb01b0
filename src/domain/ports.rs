use chrono::{DateTime, Local};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Local>;
}

pub trait Entropy: Send + Sync {
    /// Returns a digit in `[0, 10)`.
    fn digit(&self) -> u8;
}

pub trait ConfigProvider: Send + Sync {
    /// Requested section names; empty means the full tour.
    fn sections(&self) -> &[String];

    /// Optional file the transcript is also written to.
    fn output_path(&self) -> Option<&str>;
}
