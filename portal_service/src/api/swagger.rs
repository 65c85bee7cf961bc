use crate::api::portal_requests::get_request::RequestWithDocuments;
use crate::api::portal_requests::update_status::UpdateStatusBody;
use crate::api::portals::add_collaborator::CollaboratorPayload;
use crate::api::portals::create_portal::PortalPayload;
use model::document::DocumentResponse;
use model::portal::{
    CollaboratorResponse, CollaboratorStatus, MachineType, PortalResponse, PortalStatus,
};
use model::request::{PortalRequestResponse, RequestPriority, RequestStatus};
use model::response::ApiResponse;
use model::statistics::{MonthlyCount, PriorityCount, RequestStatistics};
use utoipa::OpenApi;

use super::health;
use super::portal_requests::{
    add_document, create_request, delete_document, get_request, get_statistics, list_documents,
    list_requests, my_requests, update_request, update_status,
};
use super::portals::{
    add_collaborator, create_portal, delete_portal, get_portal, list_collaborators, list_portals,
    update_portal,
};

#[derive(OpenApi)]
#[openapi(
        info(
            title = "Portal Service",
            description = "Request management for portal assets"
        ),
        paths(
            health::health_handler,
            list_requests::list_requests_handler,
            create_request::create_request_handler,
            my_requests::my_requests_handler,
            get_request::get_request_handler,
            update_request::update_request_handler,
            update_status::update_status_handler,
            get_statistics::get_statistics_handler,
            list_documents::list_documents_handler,
            add_document::add_document_handler,
            delete_document::delete_document_handler,
            list_portals::list_portals_handler,
            create_portal::create_portal_handler,
            get_portal::get_portal_handler,
            update_portal::update_portal_handler,
            delete_portal::delete_portal_handler,
            list_collaborators::list_collaborators_handler,
            add_collaborator::add_collaborator_handler,
        ),
        components(
            schemas(
                ApiResponse,
                PortalRequestResponse,
                RequestWithDocuments,
                RequestStatus,
                RequestPriority,
                UpdateStatusBody,
                DocumentResponse,

                RequestStatistics,
                PriorityCount,
                MonthlyCount,

                PortalPayload,
                PortalResponse,
                PortalStatus,
                MachineType,
                CollaboratorPayload,
                CollaboratorResponse,
                CollaboratorStatus,
            ),
        ),
        tags(
            (name = "portal-requests", description = "Request lifecycle"),
            (name = "documents", description = "Request documents"),
            (name = "portals", description = "Portal registry"),
        )
    )]
pub struct ApiDoc;
