use clap::Parser;
use unit_converter::{app, cli::Cli};

/// 프로그램의 엔트리 포인트. 인자를 해석한 뒤 애플리케이션을 실행한다.
fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = app::run(cli) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
