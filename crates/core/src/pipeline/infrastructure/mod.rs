pub mod threaded_batch_executor;
