use pantry_test_utils::prelude::*;
