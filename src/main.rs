use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use knowledge_check::{
    deck::deck_name, draw_checks, draw_menu, draw_quit_confirmation, draw_quiz, draw_summary,
    get_deck_files, handle_checks_input, handle_quit_confirm_input, handle_quiz_input,
    handle_summary_scroll, load_deck, logger, AppConfig, AppState, DeckSession,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> io::Result<()> {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    };
    if let Err(e) = logger::init(&config.log_file, config.log_level) {
        eprintln!(
            "warning: cannot open log file {}: {}",
            config.log_file.display(),
            e
        );
    }
    log::info!("starting with decks from {}", config.decks_dir.display());

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config, &mut rng);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("terminal error: {}", e);
    }
    log::logger().flush();
    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: &AppConfig,
    rng: &mut StdRng,
) -> io::Result<()> {
    let mut app_state = AppState::Menu;
    let deck_files = get_deck_files(&config.decks_dir);
    let mut selected_file_index: usize = 0;
    let mut deck_session: Option<DeckSession> = None;
    let mut status: Option<String> = None;

    loop {
        terminal.draw(|f| match app_state {
            AppState::Menu => draw_menu(
                f,
                &deck_files,
                selected_file_index,
                &config.decks_dir,
                status.as_deref(),
            ),
            AppState::Checks => {
                if let Some(session) = &deck_session {
                    draw_checks(f, session);
                }
            }
            AppState::Quiz => {
                if let Some(session) = &deck_session {
                    draw_quiz(f, session);
                }
            }
            AppState::QuizQuitConfirm => draw_quit_confirmation(f),
            AppState::Summary => {
                if let Some(session) = &mut deck_session {
                    draw_summary(f, session);
                }
            }
        })?;

        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            break;
        }

        match app_state {
            AppState::Menu => match key.code {
                KeyCode::Up => {
                    selected_file_index = selected_file_index.saturating_sub(1);
                }
                KeyCode::Down => {
                    if selected_file_index < deck_files.len().saturating_sub(1) {
                        selected_file_index += 1;
                    }
                }
                KeyCode::Enter => {
                    if let Some(path) = deck_files.get(selected_file_index) {
                        match load_deck(path, rng) {
                            Ok(deck) => {
                                let session = DeckSession::new(deck);
                                app_state = session.initial_state();
                                deck_session = Some(session);
                                status = None;
                            }
                            Err(e) => {
                                log::error!("{}", e);
                                status = Some(format!("Could not load {}: {}", deck_name(path), e));
                            }
                        }
                    }
                }
                KeyCode::Char('q') | KeyCode::Esc => break,
                _ => {}
            },
            AppState::Checks => {
                if let Some(session) = &mut deck_session {
                    handle_checks_input(session, key, &mut app_state);
                }
            }
            AppState::Quiz => {
                if let Some(session) = &mut deck_session {
                    handle_quiz_input(session, key, &mut app_state);
                }
            }
            AppState::QuizQuitConfirm => {
                if handle_quit_confirm_input(key, &mut app_state) {
                    deck_session = None;
                }
            }
            AppState::Summary => {
                if let Some(session) = &mut deck_session
                    && handle_summary_scroll(session, key)
                {
                    continue;
                }
                match key.code {
                    KeyCode::Char('r') => {
                        if let Some(session) = &mut deck_session
                            && session.restart_quiz()
                        {
                            app_state = AppState::Quiz;
                        }
                    }
                    KeyCode::Char('m') => {
                        app_state = AppState::Menu;
                        deck_session = None;
                    }
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    _ => {}
                }
            }
        }

        if app_state == AppState::Menu && deck_session.is_some() {
            deck_session = None;
        }
    }

    Ok(())
}
