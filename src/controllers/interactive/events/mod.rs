pub mod explorer_event;
