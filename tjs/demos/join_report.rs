//! Example TJS join exchange, from request to response.
//!
//! Run with: `cargo run --example join_report`
//!
//! Set `RUST_LOG=debug` to see codec and validation events.

use anyhow::{Context, bail};
use tjs::prelude::*;
use tjs::schema::JoinedOutputsType;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

const BASE_URL: &str = "http://localhost:8080/geoserver/ows";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let endpoint = service_endpoint(BASE_URL, "census", "tjs");
    info!(%endpoint, "using TJS endpoint");

    // Client side: ask the service to join remote attribute data.
    let request = JoinDataType::default()
        .with_language("en")
        .with_attribute_data(
            AttributeDataType::default()
                .with_get_data_url(format!("{endpoint}?request=GetData&DatasetURI=households")),
        );
    let request = Document::from(request);
    validate_document(&request).context("request is invalid")?;
    let request_xml = request.to_xml()?;
    println!("{request_xml}");

    // Service side: decode, dispatch and answer.
    let received = Document::from_xml_with(&request_xml, &DecodeOptions::new().with_strict(true))?;
    let Document::JoinData(join) = &received else {
        bail!("expected a JoinData request, got {}", received.root_name());
    };
    info!(
        operation = ?received.request_name(),
        update = %join.update(),
        "request accepted"
    );

    let (observer, changes) = ChannelObserver::unbounded();
    let mut status = Observed::new(StatusType::new_accepted(format!("{endpoint}/status/1")));
    status.add_observer(observer);

    // The join ran; move the status from Accepted to Completed.
    status.edit(|status| {
        status.unset_accepted();
        status.set_completed("");
    })?;
    for change in changes.try_iter() {
        info!(
            feature = change.feature_name,
            kind = ?change.kind,
            "status changed"
        );
    }

    let layer = ResourceType::new(format!("{endpoint}?service=WMS"))
        .with_named_parameter("layers", "census:households_joined");
    let response = JoinDataResponseType::new(format!("{endpoint}?request=GetCapabilities"), "en")
        .with_status(status.into_inner())
        .with_joined_outputs(JoinedOutputsType::default().with_output(OutputType::delivered(
            MechanismType::wms(),
            layer,
        )));
    let response = Document::from(response);

    // DataInputs is left out here, so validation reports it.
    for diagnostic in response.validate() {
        warn!(%diagnostic, "response is incomplete");
    }

    let response_xml = response.to_xml()?;
    println!("{response_xml}");

    // Client side again: read the outputs back.
    let Document::JoinDataResponse(answer) = Document::from_xml(&response_xml)? else {
        bail!("expected a JoinDataResponse");
    };
    let finished = answer.status().is_some_and(StatusType::is_finished);
    info!(finished, outputs = answer.outputs().len(), "response received");

    for output in answer.outputs() {
        let mechanism = output
            .mechanism()
            .and_then(MechanismType::identifier)
            .unwrap_or("unknown");
        match output.resource() {
            Some(resource) => info!(
                mechanism,
                url = resource.url().unwrap_or_default(),
                layers = resource.parameter_value("layers").unwrap_or_default(),
                "joined output"
            ),
            None => warn!(mechanism, "output carries no resource"),
        }
    }

    Ok(())
}
