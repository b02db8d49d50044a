use exhandler::declare_exception;
use exhandler::*;
use std::rc::Rc;

declare_exception!(ConfigException);

fn read_settings(path: &str) -> std::result::Result<String, ConfigException> {
    std::fs::read_to_string(path).map_err(|e| {
        ConfigException::new(format!("cannot load settings from {}", path), 2)
            .caused_by(ErrorRecord::from_error(&e))
    })
}

fn main() {
    env_logger::init();

    let mut handler = ExceptionHandler::new();
    handler.attach_listener(Rc::new(|error: &dyn Reportable| {
        log::info!("reported {} (code {})", error.class_name(), error.code());
    }));

    let path = std::env::args().nth(1).unwrap_or_else(|| "settings.toml".to_owned());
    let code = match read_settings(&path) {
        Ok(settings) => {
            println!("{}", settings);
            exit::EXIT_SUCCESS
        }
        Err(error) => handler.invoke(&error),
    };
    std::process::exit(code);
}
