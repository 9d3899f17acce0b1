/*
 * Copyright Amazon.com, Inc. or its affiliates. All Rights Reserved.
 * SPDX-License-Identifier: Apache-2.0.
 */

pub fn parse_describe_affected_accounts_for_organization_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAffectedAccountsForOrganizationOutput, crate::error::DescribeAffectedAccountsForOrganizationError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeAffectedAccountsForOrganizationError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidPaginationToken" => {
            let mut tmp: crate::error::InvalidPaginationToken = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeAffectedAccountsForOrganizationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeAffectedAccountsForOrganizationError {
                meta: generic,
                kind:
                    crate::error::DescribeAffectedAccountsForOrganizationErrorKind::InvalidPaginationToken(tmp),
            }
        }
        _ => crate::error::DescribeAffectedAccountsForOrganizationError::generic(generic),
    })
}

pub fn parse_describe_affected_accounts_for_organization_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAffectedAccountsForOrganizationOutput, crate::error::DescribeAffectedAccountsForOrganizationError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeAffectedAccountsForOrganizationError::unhandled)
}

pub fn parse_describe_affected_entities_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAffectedEntitiesOutput, crate::error::DescribeAffectedEntitiesError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeAffectedEntitiesError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidPaginationToken" => {
            let mut tmp: crate::error::InvalidPaginationToken = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeAffectedEntitiesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeAffectedEntitiesError {
                meta: generic,
                kind: crate::error::DescribeAffectedEntitiesErrorKind::InvalidPaginationToken(tmp),
            }
        }
        "UnsupportedLocale" => {
            let mut tmp: crate::error::UnsupportedLocale = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeAffectedEntitiesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeAffectedEntitiesError {
                meta: generic,
                kind: crate::error::DescribeAffectedEntitiesErrorKind::UnsupportedLocale(tmp),
            }
        }
        _ => crate::error::DescribeAffectedEntitiesError::generic(generic),
    })
}

pub fn parse_describe_affected_entities_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAffectedEntitiesOutput, crate::error::DescribeAffectedEntitiesError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeAffectedEntitiesError::unhandled)
}

pub fn parse_describe_affected_entities_for_organization_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAffectedEntitiesForOrganizationOutput, crate::error::DescribeAffectedEntitiesForOrganizationError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeAffectedEntitiesForOrganizationError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidPaginationToken" => {
            let mut tmp: crate::error::InvalidPaginationToken = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeAffectedEntitiesForOrganizationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeAffectedEntitiesForOrganizationError {
                meta: generic,
                kind:
                    crate::error::DescribeAffectedEntitiesForOrganizationErrorKind::InvalidPaginationToken(tmp),
            }
        }
        "UnsupportedLocale" => {
            let mut tmp: crate::error::UnsupportedLocale = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeAffectedEntitiesForOrganizationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeAffectedEntitiesForOrganizationError {
                meta: generic,
                kind:
                    crate::error::DescribeAffectedEntitiesForOrganizationErrorKind::UnsupportedLocale(tmp),
            }
        }
        _ => crate::error::DescribeAffectedEntitiesForOrganizationError::generic(generic),
    })
}

pub fn parse_describe_affected_entities_for_organization_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeAffectedEntitiesForOrganizationOutput, crate::error::DescribeAffectedEntitiesForOrganizationError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeAffectedEntitiesForOrganizationError::unhandled)
}

pub fn parse_describe_entity_aggregates_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEntityAggregatesOutput, crate::error::DescribeEntityAggregatesError> {
    Err(crate::error::DescribeEntityAggregatesError::generic(
        smithy_json::error::parse_generic_error(response),
    ))
}

pub fn parse_describe_entity_aggregates_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEntityAggregatesOutput, crate::error::DescribeEntityAggregatesError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeEntityAggregatesError::unhandled)
}

pub fn parse_describe_event_aggregates_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEventAggregatesOutput, crate::error::DescribeEventAggregatesError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeEventAggregatesError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidPaginationToken" => {
            let mut tmp: crate::error::InvalidPaginationToken = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeEventAggregatesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeEventAggregatesError {
                meta: generic,
                kind: crate::error::DescribeEventAggregatesErrorKind::InvalidPaginationToken(tmp),
            }
        }
        _ => crate::error::DescribeEventAggregatesError::generic(generic),
    })
}

pub fn parse_describe_event_aggregates_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEventAggregatesOutput, crate::error::DescribeEventAggregatesError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeEventAggregatesError::unhandled)
}

pub fn parse_describe_event_details_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEventDetailsOutput, crate::error::DescribeEventDetailsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeEventDetailsError::unhandled(generic)),
    };
    Err(match error_code {
        "UnsupportedLocale" => {
            let mut tmp: crate::error::UnsupportedLocale = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeEventDetailsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeEventDetailsError {
                meta: generic,
                kind: crate::error::DescribeEventDetailsErrorKind::UnsupportedLocale(tmp),
            }
        }
        _ => crate::error::DescribeEventDetailsError::generic(generic),
    })
}

pub fn parse_describe_event_details_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEventDetailsOutput, crate::error::DescribeEventDetailsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeEventDetailsError::unhandled)
}

pub fn parse_describe_event_details_for_organization_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEventDetailsForOrganizationOutput, crate::error::DescribeEventDetailsForOrganizationError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeEventDetailsForOrganizationError::unhandled(generic)),
    };
    Err(match error_code {
        "UnsupportedLocale" => {
            let mut tmp: crate::error::UnsupportedLocale = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeEventDetailsForOrganizationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeEventDetailsForOrganizationError {
                meta: generic,
                kind:
                    crate::error::DescribeEventDetailsForOrganizationErrorKind::UnsupportedLocale(tmp),
            }
        }
        _ => crate::error::DescribeEventDetailsForOrganizationError::generic(generic),
    })
}

pub fn parse_describe_event_details_for_organization_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEventDetailsForOrganizationOutput, crate::error::DescribeEventDetailsForOrganizationError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeEventDetailsForOrganizationError::unhandled)
}

pub fn parse_describe_event_types_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEventTypesOutput, crate::error::DescribeEventTypesError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeEventTypesError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidPaginationToken" => {
            let mut tmp: crate::error::InvalidPaginationToken = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeEventTypesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeEventTypesError {
                meta: generic,
                kind: crate::error::DescribeEventTypesErrorKind::InvalidPaginationToken(tmp),
            }
        }
        "UnsupportedLocale" => {
            let mut tmp: crate::error::UnsupportedLocale = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeEventTypesError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeEventTypesError {
                meta: generic,
                kind: crate::error::DescribeEventTypesErrorKind::UnsupportedLocale(tmp),
            }
        }
        _ => crate::error::DescribeEventTypesError::generic(generic),
    })
}

pub fn parse_describe_event_types_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEventTypesOutput, crate::error::DescribeEventTypesError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeEventTypesError::unhandled)
}

pub fn parse_describe_events_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEventsOutput, crate::error::DescribeEventsError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeEventsError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidPaginationToken" => {
            let mut tmp: crate::error::InvalidPaginationToken = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeEventsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeEventsError {
                meta: generic,
                kind: crate::error::DescribeEventsErrorKind::InvalidPaginationToken(tmp),
            }
        }
        "UnsupportedLocale" => {
            let mut tmp: crate::error::UnsupportedLocale = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeEventsError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeEventsError {
                meta: generic,
                kind: crate::error::DescribeEventsErrorKind::UnsupportedLocale(tmp),
            }
        }
        _ => crate::error::DescribeEventsError::generic(generic),
    })
}

pub fn parse_describe_events_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEventsOutput, crate::error::DescribeEventsError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeEventsError::unhandled)
}

pub fn parse_describe_events_for_organization_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEventsForOrganizationOutput, crate::error::DescribeEventsForOrganizationError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DescribeEventsForOrganizationError::unhandled(generic)),
    };
    Err(match error_code {
        "InvalidPaginationToken" => {
            let mut tmp: crate::error::InvalidPaginationToken = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeEventsForOrganizationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeEventsForOrganizationError {
                meta: generic,
                kind:
                    crate::error::DescribeEventsForOrganizationErrorKind::InvalidPaginationToken(tmp),
            }
        }
        "UnsupportedLocale" => {
            let mut tmp: crate::error::UnsupportedLocale = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DescribeEventsForOrganizationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DescribeEventsForOrganizationError {
                meta: generic,
                kind: crate::error::DescribeEventsForOrganizationErrorKind::UnsupportedLocale(tmp),
            }
        }
        _ => crate::error::DescribeEventsForOrganizationError::generic(generic),
    })
}

pub fn parse_describe_events_for_organization_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeEventsForOrganizationOutput, crate::error::DescribeEventsForOrganizationError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeEventsForOrganizationError::unhandled)
}

pub fn parse_describe_health_service_status_for_organization_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeHealthServiceStatusForOrganizationOutput, crate::error::DescribeHealthServiceStatusForOrganizationError> {
    Err(crate::error::DescribeHealthServiceStatusForOrganizationError::generic(
        smithy_json::error::parse_generic_error(response),
    ))
}

pub fn parse_describe_health_service_status_for_organization_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DescribeHealthServiceStatusForOrganizationOutput, crate::error::DescribeHealthServiceStatusForOrganizationError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DescribeHealthServiceStatusForOrganizationError::unhandled)
}

pub fn parse_disable_health_service_access_for_organization_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DisableHealthServiceAccessForOrganizationOutput, crate::error::DisableHealthServiceAccessForOrganizationError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::DisableHealthServiceAccessForOrganizationError::unhandled(generic)),
    };
    Err(match error_code {
        "ConcurrentModificationException" => {
            let mut tmp: crate::error::ConcurrentModificationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::DisableHealthServiceAccessForOrganizationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::DisableHealthServiceAccessForOrganizationError {
                meta: generic,
                kind:
                    crate::error::DisableHealthServiceAccessForOrganizationErrorKind::ConcurrentModificationException(tmp),
            }
        }
        _ => crate::error::DisableHealthServiceAccessForOrganizationError::generic(generic),
    })
}

pub fn parse_disable_health_service_access_for_organization_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::DisableHealthServiceAccessForOrganizationOutput, crate::error::DisableHealthServiceAccessForOrganizationError> {
    smithy_json::from_body(response.body()).map_err(crate::error::DisableHealthServiceAccessForOrganizationError::unhandled)
}

pub fn parse_enable_health_service_access_for_organization_error(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::EnableHealthServiceAccessForOrganizationOutput, crate::error::EnableHealthServiceAccessForOrganizationError> {
    let generic = smithy_json::error::parse_generic_error(response);
    let error_code = match generic.code() {
        Some(code) => code,
        None => return Err(crate::error::EnableHealthServiceAccessForOrganizationError::unhandled(generic)),
    };
    Err(match error_code {
        "ConcurrentModificationException" => {
            let mut tmp: crate::error::ConcurrentModificationException = match smithy_json::from_body(response.body()) {
                Ok(body) => body,
                Err(e) => return Err(crate::error::EnableHealthServiceAccessForOrganizationError::unhandled(e)),
            };
            if tmp.message.is_none() {
                tmp.message = generic.message().map(|msg| msg.to_string());
            }
            crate::error::EnableHealthServiceAccessForOrganizationError {
                meta: generic,
                kind:
                    crate::error::EnableHealthServiceAccessForOrganizationErrorKind::ConcurrentModificationException(tmp),
            }
        }
        _ => crate::error::EnableHealthServiceAccessForOrganizationError::generic(generic),
    })
}

pub fn parse_enable_health_service_access_for_organization_response(
    response: &http::Response<bytes::Bytes>,
) -> std::result::Result<crate::output::EnableHealthServiceAccessForOrganizationOutput, crate::error::EnableHealthServiceAccessForOrganizationError> {
    smithy_json::from_body(response.body()).map_err(crate::error::EnableHealthServiceAccessForOrganizationError::unhandled)
}
