use gitfacade::git::GitError;
use gitfacade::ui::output;

fn main() {
    if let Err(err) = gitfacade::cli::run() {
        output::error(format!("{:#}", err));

        // Library failures exit with their numeric kind, everything else with 1.
        let code = err
            .downcast_ref::<GitError>()
            .and_then(GitError::kind)
            .map(|kind| i32::from(kind.code()))
            .unwrap_or(1);
        std::process::exit(code);
    }
}
