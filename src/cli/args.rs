use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "exam_patterns")]
#[command(about = "Demonstrates a shared printer instance and an exam factory family")]
#[command(version)]
pub struct Cli {}
