//! Sequential seeding through the session-scoped services.

use super::dataset::{CategorySeed, Dataset, TrainingCenterSeed};
use super::report::{Batch, BatchReport, SeedReporter, SeedSummary};
use crate::controller::{AthleteController, CategoryController, TrainingCenterController};
use crate::service::athlete_service::{AthleteService, NewAthlete};
use crate::service::category_service::CategoryService;
use crate::service::training_center_service::TrainingCenterService;
use crate::session::SessionFactory;
use log::{info, warn};
use std::time::Instant;

/// Applies a `Dataset` batch by batch; each record runs in its own session.
pub struct Seeder<'s, F, C> {
    factory: &'s F,
    controller: &'s C,
}

impl<'s, F, C> Seeder<'s, F, C>
where
    F: SessionFactory,
    C: CategoryController<F::Session>
        + TrainingCenterController<F::Session>
        + AthleteController<F::Session>,
{
    pub fn new(factory: &'s F, controller: &'s C) -> Self {
        Self {
            factory,
            controller,
        }
    }

    /// Seeds categories, then training centers, then athletes.
    ///
    /// Record failures are reported and counted, never returned.
    pub async fn run<R>(&self, dataset: &Dataset, reporter: &mut R) -> SeedSummary
    where
        R: SeedReporter + ?Sized,
    {
        let started_at = Instant::now();
        info!(
            "event=seed_run module=seed status=start records={}",
            dataset.total_records()
        );
        reporter.run_started();

        let categories = self.seed_categories(&dataset.categories, reporter).await;
        let training_centers = self
            .seed_training_centers(&dataset.training_centers, reporter)
            .await;
        let athletes = self.seed_athletes(&dataset.athletes, reporter).await;

        let summary = SeedSummary {
            categories,
            training_centers,
            athletes,
        };
        info!(
            "event=seed_run module=seed status=ok duration_ms={} succeeded={} failed={}",
            started_at.elapsed().as_millis(),
            summary.total_succeeded(),
            summary.total_failed()
        );
        reporter.run_finished(&summary);
        summary
    }

    async fn seed_categories<R>(&self, seeds: &[CategorySeed], reporter: &mut R) -> BatchReport
    where
        R: SeedReporter + ?Sized,
    {
        let batch = Batch::Categories;
        reporter.batch_started(batch);
        let service = CategoryService::new(self.factory, self.controller);
        let mut report = BatchReport::new(batch);

        for seed in seeds {
            match service.create(&seed.name).await {
                Ok(created) => {
                    report.record_success();
                    let detail = format!("{} (ID: {})", created.name, created.id);
                    reporter.record_succeeded(batch, &detail);
                }
                Err(err) => {
                    warn!(
                        "event=seed_record module=seed status=error batch=categories record={} error={}",
                        seed.name, err
                    );
                    reporter.record_failed(batch, &seed.name, &err);
                    report.record_failure(&seed.name, &err);
                }
            }
        }

        finish_batch(report, reporter)
    }

    async fn seed_training_centers<R>(
        &self,
        seeds: &[TrainingCenterSeed],
        reporter: &mut R,
    ) -> BatchReport
    where
        R: SeedReporter + ?Sized,
    {
        let batch = Batch::TrainingCenters;
        reporter.batch_started(batch);
        let service = TrainingCenterService::new(self.factory, self.controller);
        let mut report = BatchReport::new(batch);

        for seed in seeds {
            match service.create(&seed.name, &seed.address, &seed.owner).await {
                Ok(created) => {
                    report.record_success();
                    let detail = format!("{} (ID: {})", created.name, created.id);
                    reporter.record_succeeded(batch, &detail);
                }
                Err(err) => {
                    warn!(
                        "event=seed_record module=seed status=error batch=training_centers record={} error={}",
                        seed.name, err
                    );
                    reporter.record_failed(batch, &seed.name, &err);
                    report.record_failure(&seed.name, &err);
                }
            }
        }

        finish_batch(report, reporter)
    }

    async fn seed_athletes<R>(&self, seeds: &[NewAthlete], reporter: &mut R) -> BatchReport
    where
        R: SeedReporter + ?Sized,
    {
        let batch = Batch::Athletes;
        reporter.batch_started(batch);
        let service = AthleteService::new(self.factory, self.controller);
        let mut report = BatchReport::new(batch);

        for seed in seeds {
            match service.create(seed).await {
                Ok(created) => {
                    report.record_success();
                    reporter.record_succeeded(
                        batch,
                        &format!(
                            "{} ({} / {})",
                            created.name, created.category.name, created.training_center.name
                        ),
                    );
                }
                Err(err) => {
                    warn!(
                        "event=seed_record module=seed status=error batch=athletes record={} error={}",
                        seed.name, err
                    );
                    reporter.record_failed(batch, &seed.name, &err);
                    report.record_failure(&seed.name, &err);
                }
            }
        }

        finish_batch(report, reporter)
    }
}

fn finish_batch<R>(report: BatchReport, reporter: &mut R) -> BatchReport
where
    R: SeedReporter + ?Sized,
{
    info!(
        "event=seed_batch module=seed status=ok batch={:?} attempted={} succeeded={}",
        report.batch, report.attempted, report.succeeded
    );
    reporter.batch_finished(&report);
    report
}
