mod handler;
mod notify;
mod start;
