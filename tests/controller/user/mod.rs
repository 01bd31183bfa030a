mod create_user;
mod current_user;

use super::*;
