pub mod cases;
pub mod chat;
pub mod health;
pub mod symptoms;
pub mod triage;
