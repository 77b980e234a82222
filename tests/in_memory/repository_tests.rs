//! Contract tests for the in-memory repositories.

use super::helpers::{project, project_repo, task, task_repo};
use eyre::{bail, ensure};
use rstest::rstest;
use taskboard::{
    adapters::memory::{InMemoryProjectRepository, InMemoryTaskRepository},
    domain::{NotFoundError, ProjectId, TaskId, TaskStatus},
    ports::{ProjectRepository, RepositoryError, TaskFilter, TaskRepository},
};

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_get_returns_saved_project(
    project_repo: InMemoryProjectRepository,
) -> eyre::Result<()> {
    let stored = project("Website Revamp")?;
    project_repo.save(&stored).await?;

    let fetched = project_repo.get(stored.id()).await?;

    ensure!(fetched == stored);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_get_reports_missing_project(
    project_repo: InMemoryProjectRepository,
) -> eyre::Result<()> {
    let missing = ProjectId::new();

    match project_repo.get(missing).await {
        Err(RepositoryError::NotFound(NotFoundError::Project(id))) if id == missing => Ok(()),
        other => bail!("expected project not found, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn project_save_is_an_upsert(project_repo: InMemoryProjectRepository) -> eyre::Result<()> {
    let first = project("Website Revamp")?;
    let second = project("Mobile Launch")?;
    project_repo.save(&first).await?;
    project_repo.save(&second).await?;
    project_repo.save(&first).await?;

    let listed = project_repo.list().await?;

    ensure!(listed == vec![first, second], "unexpected listing {listed:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_get_reports_missing_task(task_repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let missing = TaskId::new();

    match task_repo.get(missing).await {
        Err(RepositoryError::NotFound(NotFoundError::Task(id))) if id == missing => Ok(()),
        other => bail!("expected task not found, got {other:?}"),
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_save_replaces_existing_entry(task_repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let mut stored = task("Fix login bug", ProjectId::new(), 1)?;
    task_repo.save(&stored).await?;

    stored.transition_to(TaskStatus::Doing)?;
    stored.update_title("Fix logout bug")?;
    task_repo.save(&stored).await?;

    let fetched = task_repo.get(stored.id()).await?;
    ensure!(fetched == stored);
    ensure!(task_repo.list(&TaskFilter::new()).await?.len() == 1);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stored_copies_are_isolated_from_callers(
    task_repo: InMemoryTaskRepository,
) -> eyre::Result<()> {
    let mut local = task("Fix login bug", ProjectId::new(), 1)?;
    task_repo.save(&local).await?;

    local.transition_to(TaskStatus::Doing)?;

    ensure!(task_repo.get(local.id()).await?.status() == TaskStatus::Todo);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_list_applies_filter_in_insertion_order(
    task_repo: InMemoryTaskRepository,
) -> eyre::Result<()> {
    let alpha = ProjectId::new();
    let beta = ProjectId::new();
    let first = task("Alpha first", alpha, 1)?;
    let mut second = task("Alpha second", alpha, 2)?;
    let third = task("Beta only", beta, 3)?;
    second.transition_to(TaskStatus::Doing)?;
    for entry in [&first, &second, &third] {
        task_repo.save(entry).await?;
    }

    let by_project = task_repo.list(&TaskFilter::new().with_project(alpha)).await?;
    ensure!(by_project == vec![first.clone(), second.clone()]);

    let doing = task_repo
        .list(&TaskFilter::new().with_status(TaskStatus::Doing))
        .await?;
    ensure!(doing == vec![second.clone()]);

    let beta_doing = task_repo
        .list(
            &TaskFilter::new()
                .with_project(beta)
                .with_status(TaskStatus::Doing),
        )
        .await?;
    ensure!(beta_doing.is_empty());

    let everything = task_repo.list(&TaskFilter::new()).await?;
    ensure!(everything == vec![first, second, third]);
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn clones_share_state(task_repo: InMemoryTaskRepository) -> eyre::Result<()> {
    let handle = task_repo.clone();
    let stored = task("Shared entry", ProjectId::new(), 1)?;
    handle.save(&stored).await?;

    ensure!(task_repo.get(stored.id()).await? == stored);
    Ok(())
}
