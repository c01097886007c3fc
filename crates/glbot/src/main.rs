//! CLI entry point.

fn main() -> anyhow::Result<()> {
    glbot::initialize_command_line()
}
