pub mod type_name;
