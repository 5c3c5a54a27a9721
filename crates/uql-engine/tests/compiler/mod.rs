mod helpers;
mod relational;
mod request;
