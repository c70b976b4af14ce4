use poetic::PACKAGE_INFO;

/// Args for the info command.
#[derive(clap::Args, Debug)]
pub struct InfoArgs {
    /// Also print the project homepage.
    #[arg(long)]
    pub homepage: bool,
}

impl InfoArgs {
    /// Run the info command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        println!("{}", PACKAGE_INFO.version_line());
        if self.homepage {
            println!("{}", PACKAGE_INFO.homepage);
        }
        Ok(())
    }
}
