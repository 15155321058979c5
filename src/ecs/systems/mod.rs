pub mod cure;
