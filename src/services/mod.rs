pub mod aggregation;
pub mod estimation;
pub mod forecast_config;
pub mod observation_yaml;
pub mod validation;
pub mod weighted_stats;
pub mod workload_plot;
