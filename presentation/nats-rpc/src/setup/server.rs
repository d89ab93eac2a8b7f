use std::sync::Arc;

use anyhow::Context;
use async_nats::{Client, ConnectOptions, Message};
use futures::StreamExt;
use poem::http::StatusCode;
use poem::{EndpointExt, Route, Server as PoemServer, listener::TcpListener, middleware::Tracing};
use poem_openapi::OpenApiService;
use tokio::task::JoinSet;
use tracing::{Instrument, info, info_span, warn};

use crate::config::{app_config::AppConfig, nats_config::NatsConfig};
use crate::rpc::error::{ErrorResponse, ReplyEnvelope};
use crate::rpc::product::router::ProductRouter;
use crate::setup::dependency_injection::DependencyContainer;

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let DependencyContainer {
            pool,
            product_router,
            health_api,
        } = container;

        let addr = config.health.bind_address();
        let health_service = OpenApiService::new(health_api, "Products Service", "0.1.0")
            .server(format!("http://{}", addr));
        let app = Route::new().nest("/", health_service).with(Tracing);
        let listener = TcpListener::bind(addr.clone());
        let health_task = tokio::spawn(async move {
            if let Err(err) = PoemServer::new(listener).run(app).await {
                tracing::error!(error = %err, "Health server stopped");
            }
        });
        info!(%addr, "Health probe listening");

        let client = ConnectOptions::new()
            .name(config.nats.client_name.as_str())
            .connect(config.nats.url.as_str())
            .await
            .with_context(|| format!("Failed to connect to NATS at {}", config.nats.url))?;

        let subject = config.nats.subscription_subject();
        let mut subscriber = client
            .queue_subscribe(subject.clone(), config.nats.queue_group.clone())
            .await
            .with_context(|| format!("Failed to queue subscribe to {}", subject))?;
        info!(
            %subject,
            queue_group = %config.nats.queue_group,
            "Products service listening"
        );

        let nats = Arc::new(config.nats);
        let mut in_flight = JoinSet::new();
        loop {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {
                    info!("Shutdown signal received");
                    break;
                }
                next = subscriber.next() => {
                    let Some(message) = next else {
                        warn!("Subscription closed by server");
                        break;
                    };
                    let client = client.clone();
                    let router = product_router.clone();
                    let nats = nats.clone();
                    let span = info_span!("request", subject = %message.subject);
                    in_flight.spawn(
                        async move { handle_message(&client, &router, &nats, message).await }
                            .instrument(span),
                    );
                }
                Some(_) = in_flight.join_next(), if !in_flight.is_empty() => {}
            }
        }

        if let Err(err) = subscriber.unsubscribe().await {
            warn!(error = %err, "Failed to unsubscribe");
        }
        let drained = drain_in_flight(&mut in_flight).await;
        info!(drained, "In-flight requests completed");
        client.flush().await.context("Failed to flush NATS client")?;
        health_task.abort();
        pool.close().await;
        info!("Products service stopped");
        Ok(())
    }
}

/// Waits for every spawned handler so each caller still gets its reply.
async fn drain_in_flight(in_flight: &mut JoinSet<()>) -> usize {
    let mut drained = 0;
    while let Some(result) = in_flight.join_next().await {
        if let Err(err) = result {
            tracing::error!(error = %err, "Request handler failed");
        }
        drained += 1;
    }
    drained
}

async fn handle_message(
    client: &Client,
    router: &ProductRouter,
    nats: &NatsConfig,
    message: Message,
) {
    let Some(reply_subject) = message.reply.clone() else {
        warn!("Dropping message without reply subject");
        return;
    };

    let reply = match nats.command_from_subject(&message.subject) {
        Some(command) => router.handle(command, &message.payload).await,
        None => ReplyEnvelope::error(ErrorResponse::new(
            StatusCode::NOT_FOUND,
            "UnknownCommand",
            format!("No handler for subject {}", message.subject),
        )),
    };

    if let Some(err) = &reply.err {
        info!(status = err.status, name = %err.name, "Request failed");
    }

    if let Err(err) = client.publish(reply_subject, reply.to_bytes().into()).await {
        tracing::error!(error = %err, "Failed to publish reply");
    }
}
