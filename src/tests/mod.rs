mod fixed_keystore_tests;
mod key_input_tests;
