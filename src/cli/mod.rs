// CLI層 - コマンドライン引数の定義
// 引数は取らず、--help と --version のみを提供

pub mod args;

pub use args::Cli;
