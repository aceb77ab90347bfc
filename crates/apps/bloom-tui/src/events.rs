use bloom_core::{AppError, AppResult};
use crossterm::event::{self, Event, KeyEvent};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

pub enum AppEvent {
    Input(KeyEvent),
    Tick,
}

pub struct EventHandler {
    rx: mpsc::Receiver<AppEvent>,
    _handle: thread::JoinHandle<()>,
}

impl EventHandler {
    pub fn new(tick_rate: Duration) -> Self {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || loop {
            match event::poll(tick_rate) {
                Ok(true) => {
                    if let Ok(Event::Key(key)) = event::read() {
                        if tx.send(AppEvent::Input(key)).is_err() {
                            break;
                        }
                    }
                }
                Ok(false) => {}
                Err(_) => {
                    // Prevent busy loop on persistent poll errors
                    thread::sleep(tick_rate);
                }
            }
            if tx.send(AppEvent::Tick).is_err() {
                break;
            }
        });
        Self {
            rx,
            _handle: handle,
        }
    }

    pub fn next(&self) -> AppResult<AppEvent> {
        self.rx
            .recv()
            .map_err(|_| AppError::Internal("Event channel closed".into()))
    }
}
