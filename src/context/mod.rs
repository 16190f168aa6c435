pub mod modal_context;
