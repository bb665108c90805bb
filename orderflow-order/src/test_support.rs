//! Fake collaborators shared by the handler and processor tests.

use async_trait::async_trait;
use orderflow_core::{
    ClassificationClient, ClassificationError, ClassificationResponse, ExportSink, Order,
    OrderRepository, OrderStatus, Priority,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::{HandlerSelector, PriorityRule};

#[derive(Default)]
pub struct FakeRepository {
    orders: Vec<Order>,
    fail_fetch: bool,
    fail_updates_for: HashSet<i64>,
    pub fetches: Mutex<Vec<i64>>,
    pub updates: Mutex<Vec<(i64, OrderStatus, Priority)>>,
}

impl FakeRepository {
    pub fn with_orders(orders: Vec<Order>) -> Self {
        Self {
            orders,
            ..Default::default()
        }
    }

    pub fn failing_fetch() -> Self {
        Self {
            fail_fetch: true,
            ..Default::default()
        }
    }

    pub fn fail_update_for(mut self, order_id: i64) -> Self {
        self.fail_updates_for.insert(order_id);
        self
    }

    pub fn updates(&self) -> Vec<(i64, OrderStatus, Priority)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrderRepository for FakeRepository {
    async fn get_orders_by_user(
        &self,
        user_id: i64,
    ) -> Result<Vec<Order>, Box<dyn std::error::Error + Send + Sync>> {
        self.fetches.lock().unwrap().push(user_id);
        if self.fail_fetch {
            return Err("Database error".into());
        }
        Ok(self.orders.iter().filter(|o| o.user_id == user_id).cloned().collect())
    }

    async fn update_order_status(
        &self,
        order_id: i64,
        status: OrderStatus,
        priority: Priority,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail_updates_for.contains(&order_id) {
            return Err(format!("Update rejected for order {}", order_id).into());
        }
        self.updates.lock().unwrap().push((order_id, status, priority));
        Ok(())
    }
}

pub enum Verdict {
    Respond(ClassificationResponse),
    ApiFailure,
    Unexpected,
}

pub struct FakeClassifier {
    verdict: Verdict,
    pub calls: Mutex<Vec<i64>>,
}

impl FakeClassifier {
    pub fn new(verdict: Verdict) -> Self {
        Self {
            verdict,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn success(amount: f64) -> Self {
        Self::new(Verdict::Respond(ClassificationResponse::success(Some(amount))))
    }

    pub fn calls(&self) -> Vec<i64> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ClassificationClient for FakeClassifier {
    async fn classify(&self, order_id: i64) -> Result<ClassificationResponse, ClassificationError> {
        self.calls.lock().unwrap().push(order_id);
        match &self.verdict {
            Verdict::Respond(response) => Ok(response.clone()),
            Verdict::ApiFailure => Err(ClassificationError::Api("API error".to_string())),
            Verdict::Unexpected => Err(ClassificationError::Unexpected("Unknown error".into())),
        }
    }
}

#[derive(Default)]
pub struct FakeExportSink {
    fail: bool,
    pub exported: Mutex<Vec<Order>>,
}

impl FakeExportSink {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn exported(&self) -> Vec<Order> {
        self.exported.lock().unwrap().clone()
    }
}

#[async_trait]
impl ExportSink for FakeExportSink {
    async fn write_order(
        &self,
        order: &Order,
    ) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        if self.fail {
            return Err("File write error".into());
        }
        self.exported.lock().unwrap().push(order.clone());
        Ok(())
    }
}

/// Selector wired to fakes, with handles kept for assertions
pub struct Harness {
    pub repository: Arc<FakeRepository>,
    pub classifier: Arc<FakeClassifier>,
    pub exporter: Arc<FakeExportSink>,
    pub selector: HandlerSelector,
}

impl Harness {
    pub fn new(repository: FakeRepository, classifier: FakeClassifier, exporter: FakeExportSink) -> Self {
        let repository = Arc::new(repository);
        let classifier = Arc::new(classifier);
        let exporter = Arc::new(exporter);
        let selector = HandlerSelector::new(
            repository.clone(),
            classifier.clone(),
            exporter.clone(),
            PriorityRule::default(),
        );
        Self {
            repository,
            classifier,
            exporter,
            selector,
        }
    }

    pub fn nominal(orders: Vec<Order>) -> Self {
        Self::new(
            FakeRepository::with_orders(orders),
            FakeClassifier::success(60.0),
            FakeExportSink::default(),
        )
    }
}
