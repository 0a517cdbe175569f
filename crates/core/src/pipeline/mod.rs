pub mod batch_executor;
pub mod batch_logger;
pub mod frame_config;
pub mod frame_image_use_case;
pub mod infrastructure;
pub mod output_naming;
