use axum::Router;
use crate::core::library::{LibraryError, LibraryResult};

// serves the router on an ephemeral local port and returns its base url, used by unit and
// integration tests to stand up stub upstreams and the catalog itself
pub fn spawn_server(router: Router) -> LibraryResult<String> {
    let listener = std::net::TcpListener::bind("127.0.0.1:0")?;
    let addr = listener.local_addr()?;
    let server = axum::Server::from_tcp(listener)
        .map_err(|err| LibraryError::runtime(format!("could not serve on {} {}", addr, err).as_str(), None))?
        .serve(router.into_make_service());
    tokio::spawn(server);
    Ok(format!("http://{}", addr))
}
