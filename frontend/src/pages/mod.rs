pub mod attendance;
pub mod attendance_logs;
pub mod departments;
pub mod employees;
pub mod home;

pub use attendance::*;
pub use attendance_logs::*;
pub use departments::*;
pub use employees::*;
pub use home::*;
