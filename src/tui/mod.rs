mod app;
mod handlers;
mod menu;
mod theme;
mod ui;

use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use cd2n::navigation::Navigator;
use cd2n::Settings;

use app::App;
use handlers::LoopControl;

pub fn run(settings: &Settings) -> color_eyre::Result<()> {
    let navigator = Navigator::open(&settings.compose_path);
    ratatui::run(|terminal| app(terminal, navigator))?;
    Ok(())
}

fn app(terminal: &mut DefaultTerminal, navigator: Navigator) -> std::io::Result<()> {
    let mut app = App::new(navigator);

    loop {
        terminal.draw(|frame| ui::render(frame, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if let LoopControl::Exit = handlers::handle_key(&mut app, key) {
                break Ok(());
            }
        }
    }
}
