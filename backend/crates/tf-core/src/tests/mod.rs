mod analytics;
mod models;
