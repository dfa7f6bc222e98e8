use parlor::jokes::BuiltinJokes;
use parlor::menu;
use std::io;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut reader = stdin.lock();
    let mut writer = stdout.lock();
    let mut rng = rand::thread_rng();

    menu::run(&mut rng, &mut reader, &mut writer, &BuiltinJokes)
}
