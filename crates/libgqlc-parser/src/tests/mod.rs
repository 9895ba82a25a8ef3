mod source_position_tests;
mod syntax_error_tests;
mod syntax_value_tests;
mod token_stream_tests;
mod utils;
