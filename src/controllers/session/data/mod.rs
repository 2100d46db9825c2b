pub mod frame_data;
