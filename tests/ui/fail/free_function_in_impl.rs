#[path = "../archive.rs"]
mod archive;
#[path = "../serialize_macros.rs"]
mod generated;

pub struct Bad {
  a: i32,
}

impl Bad {
  make_serializable_1!(Bad, a);
}
