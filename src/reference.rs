use {
    crate::args::{BIN_NAME, ClapArgumentLoader},
    anyhow::{Context, Result},
    std::path::Path,
};

pub fn build_shell_completion(outdir: &Path, shell: &clap_complete::Shell) -> Result<()> {
    let mut app = ClapArgumentLoader::root_command();
    let file = clap_complete::generate_to(*shell, &mut app, BIN_NAME, outdir)
        .with_context(|| format!("Failed to write completion script to: {}", outdir.display()))?;
    tracing::info!(path = %file.display(), "wrote completion script");
    Ok(())
}

pub fn build_markdown(outdir: &Path) -> Result<()> {
    let app = ClapArgumentLoader::root_command();
    let path = outdir.join(format!("{}.md", BIN_NAME));
    std::fs::write(&path, clap_markdown::help_markdown_command(&app))
        .with_context(|| format!("Failed to write markdown reference to: {}", path.display()))?;
    tracing::info!(path = %path.display(), "wrote markdown reference");
    Ok(())
}

pub fn build_manpages(outdir: &Path) -> Result<()> {
    let app = ClapArgumentLoader::root_command();
    clap_mangen::generate_to(app, outdir)
        .with_context(|| format!("Failed to write manpages to: {}", outdir.display()))?;
    tracing::info!(path = %outdir.display(), "wrote manpages");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn markdown_documents_the_positionals() {
        let dir = tempfile::tempdir().unwrap();
        build_markdown(dir.path()).unwrap();
        let md = std::fs::read_to_string(dir.path().join("vhostgen.md")).unwrap();
        assert!(md.contains("subdomain"));
        assert!(md.contains("port"));
    }

    #[test]
    fn manpage_is_named_after_the_binary() {
        let dir = tempfile::tempdir().unwrap();
        build_manpages(dir.path()).unwrap();
        assert!(dir.path().join("vhostgen.1").exists());
    }

    #[test]
    fn bash_completion_is_written() {
        let dir = tempfile::tempdir().unwrap();
        build_shell_completion(dir.path(), &clap_complete::Shell::Bash).unwrap();
        assert!(dir.path().join("vhostgen.bash").exists());
    }
}
