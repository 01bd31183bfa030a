mod ingredients;
mod recipes;
mod tags;

use super::*;
