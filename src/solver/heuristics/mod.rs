pub mod variable;
