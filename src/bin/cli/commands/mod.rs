pub mod export;
pub mod favorites;
pub mod history;
pub mod notify;
pub mod quote;
pub mod search;
pub mod tags;
