mod struct_tests;
mod type_tests;

use crate::schema::Schema;

pub(crate) fn load(json: &str) -> Schema {
  Schema::from_json(json).unwrap()
}
