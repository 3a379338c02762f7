pub mod configuration;
pub mod dispatcher;
pub mod domain;
pub mod email_client;
pub mod handler;
pub mod response;
pub mod routes;
pub mod startup;
pub mod telemetry;
#[cfg(test)]
mod test_support;
