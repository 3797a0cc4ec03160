mod bounds;
mod email;
mod required;
