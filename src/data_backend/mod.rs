pub mod dinner_client;
pub mod dinner_render;

pub(crate) fn bold(input: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", input)
}

pub(crate) fn underline(input: &str) -> String {
    format!("\x1b[4m{}\x1b[0m", input)
}
