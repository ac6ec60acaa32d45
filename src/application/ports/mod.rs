pub mod project_source;
