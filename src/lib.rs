pub mod components;
pub mod logging;
pub mod page;
pub mod session;
pub mod storage;
pub mod system;
pub mod utility;
