pub mod codec;
pub mod event;
pub mod ext;
pub mod identity;
pub mod schema;
pub mod storage;
pub mod token;
pub mod value;
