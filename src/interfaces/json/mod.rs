pub mod launch_writer;
