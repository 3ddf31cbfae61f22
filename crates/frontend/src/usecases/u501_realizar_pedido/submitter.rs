//! Order submission with an in-flight guard
//!
//! The submitter sends an already validated draft through a `PedidoGateway`
//! and reports the created id or the server's refusal. While one submission
//! is pending every further call is refused with `SubmitError::InFlight`
//! without touching the gateway.

use async_trait::async_trait;
use contracts::domain::a004_paciente::aggregate::PacienteId;
use contracts::domain::a007_menu::MenuId;
use contracts::domain::a008_pedido::PedidoId;
use contracts::usecases::u501_realizar_pedido::{CreatePedidoRequest, Selections};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use thiserror::Error;

use crate::shared::api_error::ApiError;

/// Transport used to create pedidos
#[async_trait(?Send)]
pub trait PedidoGateway: Send + Sync {
    async fn create_pedido(&self, request: &CreatePedidoRequest) -> Result<PedidoId, ApiError>;
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SubmitError {
    #[error("Ya se está enviando un pedido, espere la respuesta")]
    InFlight,
    #[error("{message}")]
    Rejected { status: Option<u16>, message: String },
}

impl From<ApiError> for SubmitError {
    fn from(e: ApiError) -> Self {
        SubmitError::Rejected {
            status: e.status(),
            message: e.to_string(),
        }
    }
}

/// Releases the in-flight flag when dropped
struct InFlightGuard(Arc<AtomicBool>);

impl InFlightGuard {
    fn acquire(flag: &Arc<AtomicBool>) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| InFlightGuard(flag.clone()))
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

#[derive(Clone)]
pub struct OrderSubmitter {
    gateway: Arc<dyn PedidoGateway>,
    in_flight: Arc<AtomicBool>,
}

impl OrderSubmitter {
    pub fn new(gateway: Arc<dyn PedidoGateway>) -> Self {
        Self {
            gateway,
            in_flight: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.load(Ordering::Acquire)
    }

    /// Submit a bare order for `paciente` with the picked options
    pub async fn submit(
        &self,
        paciente: PacienteId,
        menu: MenuId,
        selections: Selections,
    ) -> Result<PedidoId, SubmitError> {
        self.submit_request(CreatePedidoRequest::new(paciente, menu, selections))
            .await
    }

    /// Submit a fully prepared request (notes and preparations included)
    pub async fn submit_request(&self, request: CreatePedidoRequest) -> Result<PedidoId, SubmitError> {
        let Some(_guard) = InFlightGuard::acquire(&self.in_flight) else {
            log::warn!("submit ignored, another pedido is in flight");
            return Err(SubmitError::InFlight);
        };

        match self.gateway.create_pedido(&request).await {
            Ok(id) => {
                log::info!(
                    "pedido {} created for paciente {} ({} options)",
                    id,
                    request.paciente,
                    request.opciones.total()
                );
                Ok(id)
            }
            Err(e) => {
                log::warn!("pedido for paciente {} rejected: {}", request.paciente, e);
                Err(e.into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a007_menu::{MenuOptionId, SectionTitle};
    use contracts::usecases::u501_realizar_pedido::{RuleTable, SelectionModel};
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use futures::future::join;
    use std::sync::Mutex;

    struct FakeGateway {
        calls: Mutex<Vec<CreatePedidoRequest>>,
        outcome: Result<PedidoId, ApiError>,
    }

    impl FakeGateway {
        fn new(outcome: Result<PedidoId, ApiError>) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                outcome,
            })
        }

        fn calls(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait(?Send)]
    impl PedidoGateway for FakeGateway {
        async fn create_pedido(&self, request: &CreatePedidoRequest) -> Result<PedidoId, ApiError> {
            self.calls.lock().unwrap().push(request.clone());
            self.outcome.clone()
        }
    }

    /// Gateway that answers only once the test releases it
    struct PendingGateway {
        release: Mutex<Option<oneshot::Receiver<()>>>,
        calls: Mutex<usize>,
    }

    #[async_trait(?Send)]
    impl PedidoGateway for PendingGateway {
        async fn create_pedido(&self, _request: &CreatePedidoRequest) -> Result<PedidoId, ApiError> {
            *self.calls.lock().unwrap() += 1;
            let rx = self.release.lock().unwrap().take();
            if let Some(rx) = rx {
                let _ = rx.await;
            }
            Ok(PedidoId(1))
        }
    }

    fn selections() -> Selections {
        let mut model = SelectionModel::new(Arc::new(RuleTable::hospital_default()));
        model.toggle(SectionTitle::Desayuno, "acompanantes", MenuOptionId(1), true);
        model.toggle(SectionTitle::Desayuno, "acompanantes", MenuOptionId(2), true);
        model.snapshot()
    }

    #[test]
    fn test_submit_success_returns_created_id() {
        let gateway = FakeGateway::new(Ok(PedidoId(55)));
        let submitter = OrderSubmitter::new(gateway.clone());

        let id = block_on(submitter.submit(PacienteId(3), MenuId(1), selections())).unwrap();

        assert_eq!(id, PedidoId(55));
        assert_eq!(gateway.calls(), 1);
        let sent = &gateway.calls.lock().unwrap()[0];
        assert_eq!(sent.paciente, PacienteId(3));
        assert_eq!(sent.menu_id, MenuId(1));
        assert_eq!(sent.opciones.count(SectionTitle::Desayuno, "acompanantes"), 2);
        assert!(!submitter.is_in_flight());
    }

    #[test]
    fn test_submit_failure_carries_server_message() {
        let gateway = FakeGateway::new(Err(ApiError::Status {
            status: 400,
            message: "paciente_id: Este campo es requerido.".into(),
        }));
        let submitter = OrderSubmitter::new(gateway.clone());

        let err = block_on(submitter.submit(PacienteId(3), MenuId(1), selections())).unwrap_err();

        assert_eq!(
            err,
            SubmitError::Rejected {
                status: Some(400),
                message: "paciente_id: Este campo es requerido.".into(),
            }
        );
        assert_eq!(gateway.calls(), 1);
        assert!(!submitter.is_in_flight());
    }

    #[test]
    fn test_failure_then_resubmit_is_independent() {
        let failing = FakeGateway::new(Err(ApiError::Network("offline".into())));
        let submitter = OrderSubmitter::new(failing.clone());
        assert!(block_on(submitter.submit(PacienteId(3), MenuId(1), selections())).is_err());

        let ok = FakeGateway::new(Ok(PedidoId(8)));
        let submitter = OrderSubmitter {
            gateway: ok.clone(),
            in_flight: submitter.in_flight.clone(),
        };
        assert_eq!(
            block_on(submitter.submit(PacienteId(3), MenuId(1), selections())),
            Ok(PedidoId(8))
        );
        assert_eq!(failing.calls(), 1);
        assert_eq!(ok.calls(), 1);
    }

    #[test]
    fn test_success_then_empty_resubmit_is_independent() {
        let gateway = FakeGateway::new(Ok(PedidoId(21)));
        let submitter = OrderSubmitter::new(gateway.clone());

        assert_eq!(
            block_on(submitter.submit(PacienteId(3), MenuId(1), selections())),
            Ok(PedidoId(21))
        );
        // after a success the screen resets to an empty selection
        assert_eq!(
            block_on(submitter.submit(PacienteId(3), MenuId(1), Selections::default())),
            Ok(PedidoId(21))
        );

        assert_eq!(gateway.calls(), 2);
        let calls = gateway.calls.lock().unwrap();
        assert_eq!(calls[0].opciones.total(), 2);
        assert_eq!(calls[1].opciones.total(), 0);
        assert_eq!(calls[1].paciente, PacienteId(3));
        assert_eq!(calls[1].menu, MenuId(1));
        assert!(!submitter.is_in_flight());
    }

    #[test]
    fn test_second_submit_while_pending_is_refused() {
        let (tx, rx) = oneshot::channel();
        let gateway = Arc::new(PendingGateway {
            release: Mutex::new(Some(rx)),
            calls: Mutex::new(0),
        });
        let submitter = OrderSubmitter::new(gateway.clone());

        let submitter_ref = &submitter;
        let first = submitter_ref.submit(PacienteId(3), MenuId(1), selections());
        let second = async move {
            let refused = submitter_ref.submit(PacienteId(3), MenuId(1), selections()).await;
            let _ = tx.send(());
            refused
        };
        let (first, second) = block_on(join(first, second));

        assert_eq!(first, Ok(PedidoId(1)));
        assert_eq!(second, Err(SubmitError::InFlight));
        assert_eq!(*gateway.calls.lock().unwrap(), 1);
        assert!(!submitter.is_in_flight());
    }
}
