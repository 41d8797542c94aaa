/// Command line arguments for the demo
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DemoCommandLine {
    pub stereo: bool,
}

/// Builds a DemoCommandLine from the process arguments
pub fn build_command_line() -> DemoCommandLine {
    parse_command_line(std::env::args().skip(1))
}

pub fn parse_command_line(args: impl IntoIterator<Item = String>) -> DemoCommandLine {
    let mut command_line = DemoCommandLine::default();
    for arg in args {
        if arg.eq_ignore_ascii_case("-stereo") || arg.eq_ignore_ascii_case("/stereo") {
            command_line.stereo = true;
        }
    }
    command_line
}
