pub(crate) mod confirm_dialog;
pub(crate) mod guarded_link;
pub(crate) mod status_page;
