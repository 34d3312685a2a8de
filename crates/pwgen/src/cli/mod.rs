pub mod pwgen;
