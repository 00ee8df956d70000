// server-side configuration shared by the server binary and its tests
//
// kept apart from the api crate, which also has to build for the browser
pub mod config;
pub mod server;
