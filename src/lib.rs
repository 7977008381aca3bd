pub mod client;
pub mod config;
pub mod controller;
pub mod data_models;
pub mod error;
pub mod form;
pub mod view;
