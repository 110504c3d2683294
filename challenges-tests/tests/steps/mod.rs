mod creation_form_steps;
mod store_steps;
mod view_steps;
